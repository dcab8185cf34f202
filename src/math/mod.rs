pub mod init;
pub mod matrix;

pub use init::WeightInit;
pub use matrix::Matrix;
