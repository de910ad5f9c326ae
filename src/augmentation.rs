pub(crate) mod csr;
pub mod incremental;
pub mod residual;
