/// Declares an enum for a required code system binding.
///
/// The enum reads and writes the bare code string, so it can sit inside a
/// [`Coded`](crate::stu3::Coded) field. A code outside the list is a
/// `TypeMismatch` when decoding.
///
/// ```rust,ignore
/// fhir_code_system! {
///     /// Administrative Gender
///     AdministrativeGender = "http://hl7.org/fhir/administrative-gender" {
///         Male = "male",
///         Female = "female",
///     }
/// }
/// ```
macro_rules! fhir_code_system {
    (
        $(#[$meta:meta])*
        $name:ident = $system:literal {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $code)]
                $variant,
            )+
        }

        impl $name {
            /// Every code of the system, in definition order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_code(&self) -> &'static str {
                match self {
                    $($name::$variant => $code,)+
                }
            }

            pub fn system() -> &'static str {
                $system
            }

            /// Convert this code into a FHIR `code` primitive.
            pub fn to_code(self) -> Code {
                Element::new(self.as_code().to_string())
            }

            /// Convert this code into a `Coding` with `system` and `code` set.
            pub fn to_coding(self) -> Coding {
                Coding {
                    system: Some(Element::new(Self::system().to_string())),
                    code: Some(self.to_code()),
                    ..Default::default()
                }
            }

            /// Convert this code into a `CodeableConcept` with a single coding.
            pub fn to_codeable_concept(self) -> CodeableConcept {
                CodeableConcept {
                    coding: Some(vec![self.to_coding()]),
                    ..Default::default()
                }
            }

            /// Parse a code string into this enum.
            pub fn try_from_code(code: &str) -> Result<Self, ()> {
                <Self as TryFrom<&str>>::try_from(code)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = ();

            fn try_from(s: &str) -> Result<Self, ()> {
                match s {
                    $($code => Ok($name::$variant),)+
                    _ => Err(()),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_code())
            }
        }

        impl PrimitiveValue for $name {
            const EXPECTED: &'static str = concat!("a code from ", $system);

            fn from_json(value: &Value) -> DecodeResult<Self> {
                value
                    .as_str()
                    .and_then(|code| Self::try_from_code(code).ok())
                    .ok_or_else(|| DecodeError::type_mismatch(Self::EXPECTED, value))
            }

            fn to_json(&self) -> Value {
                Value::String(self.as_code().to_string())
            }
        }
    };
}

/// Declares a choice enum for an open `name[x]` element, one that admits
/// every primitive and general-purpose datatype. Keys follow the default
/// `name` + variant rule (`valueString`, `valueCodeableConcept`).
macro_rules! open_choice {
    ($(#[$meta:meta])* $name:ident, $base:tt) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, FhirSerde)]
        #[fhir_choice_element(base_name = $base)]
        pub enum $name {
            Base64Binary(Base64Binary),
            Boolean(Boolean),
            Code(Code),
            Date(Date),
            DateTime(DateTime),
            Decimal(Decimal),
            Id(Id),
            Instant(Instant),
            Integer(Integer),
            Markdown(Markdown),
            Oid(Oid),
            PositiveInt(PositiveInt),
            String(String),
            Time(Time),
            UnsignedInt(UnsignedInt),
            Uri(Uri),
            Address(Address),
            Age(Age),
            Annotation(Annotation),
            Attachment(Attachment),
            CodeableConcept(CodeableConcept),
            Coding(Coding),
            ContactPoint(ContactPoint),
            Count(Count),
            Distance(Distance),
            Duration(Duration),
            HumanName(HumanName),
            Identifier(Identifier),
            Money(Money),
            Period(Period),
            Quantity(Quantity),
            Range(Range),
            Ratio(Ratio),
            Reference(Reference),
            SampledData(SampledData),
            Signature(Signature),
            Timing(Timing),
            Meta(Meta),
        }
    };
}
