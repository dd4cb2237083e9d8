pub mod av;
pub mod av_dto;
pub mod mandrill;
pub mod mandrill_dto;
pub mod utils;

pub use av::AvApi;
pub use mandrill::MandrillApi;
