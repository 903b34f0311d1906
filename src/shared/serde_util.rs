//! Custom serde helpers for backend wire formats.

/// `Decimal` the API may send either as a JSON string (`"3693.41"`) or as a
/// bare number. Always written back as a string.
pub mod decimal_lenient {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::str::FromStr;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Num(serde_json::Number),
    }

    fn parse<E: serde::de::Error>(raw: Raw) -> Result<Decimal, E> {
        let text = match raw {
            Raw::Str(s) => s,
            Raw::Num(n) => n.to_string(),
        };
        Decimal::from_str(text.trim())
            .or_else(|_| Decimal::from_scientific(text.trim()))
            .map_err(|e| E::custom(format!("Invalid decimal '{}': {}", text, e)))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        parse(Raw::deserialize(deserializer)?)
    }

    pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    /// Same as the parent module, but `null`/absent maps to `None`.
    pub mod option {
        use super::Raw;
        use rust_decimal::Decimal;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match value {
                Some(v) => serializer.collect_str(v),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
        where
            D: Deserializer<'de>,
        {
            match Option::<Raw>::deserialize(deserializer)? {
                Some(raw) => super::parse(raw).map(Some),
                None => Ok(None),
            }
        }
    }

    /// A sequence of lenient decimals.
    pub mod vec {
        use super::Raw;
        use rust_decimal::Decimal;
        use serde::{Deserialize, Deserializer, Serializer};

        #[allow(clippy::ptr_arg)]
        pub fn serialize<S>(values: &Vec<Decimal>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.collect_seq(values.iter().map(|v| v.to_string()))
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Decimal>, D::Error>
        where
            D: Deserializer<'de>,
        {
            Vec::<Raw>::deserialize(deserializer)?
                .into_iter()
                .map(super::parse)
                .collect()
        }
    }
}
