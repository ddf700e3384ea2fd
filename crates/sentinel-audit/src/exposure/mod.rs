mod hibp;
mod types;

pub use hibp::ExposureError;
pub use types::PasswordExposure;

pub(crate) use hibp::check_exposure;
