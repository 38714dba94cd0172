//! FHIR primitive types.
//!
//! Each primitive is an [`Element`] over the Rust type holding its value, so
//! any of them can carry an element id and extensions in a `_field` sibling.

use crate::date_time::{PrecisionDate, PrecisionDateTime, PrecisionInstant, PrecisionTime};
use crate::element::Element;
use crate::precise_decimal::PreciseDecimal;
use crate::stu3::Extension;

pub type Boolean = Element<bool, Extension>;
pub type Integer = Element<i32, Extension>;
pub type PositiveInt = Element<u32, Extension>;
pub type UnsignedInt = Element<u32, Extension>;

/// Keeps the number exactly as written, see [`PreciseDecimal`].
pub type Decimal = Element<PreciseDecimal, Extension>;

pub type String = Element<std::string::String, Extension>;
pub type Code = Element<std::string::String, Extension>;
pub type Id = Element<std::string::String, Extension>;
pub type Oid = Element<std::string::String, Extension>;
pub type Uri = Element<std::string::String, Extension>;
pub type Markdown = Element<std::string::String, Extension>;
pub type Base64Binary = Element<std::string::String, Extension>;
pub type Xhtml = Element<std::string::String, Extension>;

/// Partial dates keep their precision: `"2014-03"` stays `"2014-03"`.
pub type Date = Element<PrecisionDate, Extension>;
pub type DateTime = Element<PrecisionDateTime, Extension>;
pub type Time = Element<PrecisionTime, Extension>;
pub type Instant = Element<PrecisionInstant, Extension>;

/// A `code` bound to a required code system, e.g.
/// `Coded<ObservationStatus>` for `Observation.status`.
pub type Coded<C> = Element<C, Extension>;
