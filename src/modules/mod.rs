pub mod statics {
    pub mod handle;
    pub mod route;
}

pub mod upload {
    pub mod handle;
    pub mod route;
    pub mod service;
}
