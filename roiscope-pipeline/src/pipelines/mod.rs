pub mod estimate_digest;
