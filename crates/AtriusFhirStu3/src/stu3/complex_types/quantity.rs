use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// Declares a datatype with the shape of `Quantity`. STU3 profiles
/// `Quantity` into several named types that differ only in their invariants.
macro_rules! quantity_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
        pub struct $name {
            pub id: Option<std::string::String>,
            pub extension: Option<Vec<Extension>>,
            /// Numerical value (with implicit precision)
            pub value: Option<Decimal>,
            /// < | <= | >= | > - how to understand the value
            pub comparator: Option<Coded<QuantityComparator>>,
            /// Unit representation
            pub unit: Option<String>,
            /// System that defines coded unit form
            pub system: Option<Uri>,
            /// Coded form of the unit
            pub code: Option<Code>,
        }
    };
}

quantity_type! {
    /// A measured or measurable amount.
    Quantity
}

quantity_type! {
    /// A duration of time during which an organism (or a process) has existed.
    Age
}

quantity_type! {
    /// A measured amount (or an amount that can potentially be measured).
    Count
}

quantity_type! {
    /// A length - a value with a unit that is a physical distance.
    Distance
}

quantity_type! {
    /// A length of time.
    Duration
}

quantity_type! {
    /// An amount of economic utility in some recognized currency.
    Money
}

/// A `Quantity` without a comparator. Its JSON keys use the `Quantity`
/// suffix (`doseQuantity`), so it shares the type.
pub type SimpleQuantity = Quantity;
