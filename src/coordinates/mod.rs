pub mod angle;
pub mod spherical;

pub use angle::normalize_angle;
pub use spherical::SphericalCoord;
