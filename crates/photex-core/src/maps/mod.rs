//! PBR texture map generators.
//!
//! Each module derives one map from the diffuse input image. The four
//! generators are independent of each other and order-insensitive.

mod ao;
mod displacement;
mod normal;
mod roughness;

pub use ao::AoGenerator;
pub use displacement::DisplacementGenerator;
pub use normal::NormalGenerator;
pub use roughness::RoughnessGenerator;
