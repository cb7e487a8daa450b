//! Curve representations.

mod discount;

pub use discount::DiscountCurve;
