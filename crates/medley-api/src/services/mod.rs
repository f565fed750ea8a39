pub mod upload;

pub use upload::MediaUploadService;
