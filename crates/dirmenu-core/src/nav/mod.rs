//! Navigation logic for dirmenu.
//!
//! The [`controller::Navigator`] owns a [`session::NavigationSession`] and
//! rebuilds its pages through [`sort`], [`keys`], [`filter`] and [`page`]
//! whenever a command changes what should be shown. [`boundary`] keeps every
//! move inside the configured root.

pub mod boundary;
pub mod controller;
pub mod filter;
pub mod keys;
pub mod page;
pub mod session;
pub mod sort;
