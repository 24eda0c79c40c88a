//! Entity Module

pub mod company;
