#![no_std]

pub mod fee_math;

pub use fee_math::*;
