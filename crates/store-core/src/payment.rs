//! # Payment Types
//!
//! The payment record accepted and echoed by `POST /api/payments`.
//! Nothing here is persisted or forwarded to a payment provider.

use crate::amount::Amount;
use crate::error::{StoreError, StoreResult};
use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A payment record as submitted by a client
#[derive(Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Client supplied identifier; may be empty
    pub id: String,

    /// Payment amount; must be a JSON number
    pub amount: Amount,

    pub card_number: String,

    pub card_expiry: String,

    pub card_cvv: String,
}

#[derive(Debug, Clone, Copy)]
enum Field {
    Id,
    Amount,
    CardNumber,
    CardExpiry,
    CardCvv,
}

impl Field {
    const NAMES: [(&'static str, Field); 5] = [
        ("id", Field::Id),
        ("amount", Field::Amount),
        ("cardNumber", Field::CardNumber),
        ("cardExpiry", Field::CardExpiry),
        ("cardCvv", Field::CardCvv),
    ];

    /// Keys match their wire name ignoring ASCII case
    fn from_key(key: &str) -> Option<Field> {
        Self::NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(_, field)| *field)
    }
}

struct PaymentVisitor;

impl<'de> Visitor<'de> for PaymentVisitor {
    type Value = Payment;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a payment object")
    }

    // null leaves every field at its zero value
    fn visit_unit<E: de::Error>(self) -> Result<Payment, E> {
        Ok(Payment::default())
    }

    // Entries are applied in document order, so a repeated key keeps its last value
    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Payment, A::Error> {
        let mut payment = Payment::default();

        while let Some(key) = map.next_key::<String>()? {
            match Field::from_key(&key) {
                Some(Field::Id) => payment.id = null_as_empty(&mut map)?,
                Some(Field::Amount) => payment.amount = map.next_value()?,
                Some(Field::CardNumber) => payment.card_number = null_as_empty(&mut map)?,
                Some(Field::CardExpiry) => payment.card_expiry = null_as_empty(&mut map)?,
                Some(Field::CardCvv) => payment.card_cvv = null_as_empty(&mut map)?,
                None => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(payment)
    }
}

fn null_as_empty<'de, A: MapAccess<'de>>(map: &mut A) -> Result<String, A::Error> {
    Ok(map.next_value::<Option<String>>()?.unwrap_or_default())
}

impl<'de> Deserialize<'de> for Payment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PaymentVisitor)
    }
}

impl Payment {
    /// Decode a payment from a raw request body.
    ///
    /// Only the first JSON value in `body` is read; anything after it is
    /// ignored. Missing fields keep their zero value and keys are matched
    /// case-insensitively.
    pub fn from_json(body: &[u8]) -> StoreResult<Self> {
        let mut stream = serde_json::Deserializer::from_slice(body).into_iter::<Payment>();
        match stream.next() {
            None => Err(StoreError::EmptyBody),
            Some(result) => result.map_err(StoreError::from),
        }
    }

    /// Card number with everything but the last four characters masked
    pub fn masked_card(&self) -> String {
        let len = self.card_number.chars().count();
        if len <= 4 {
            return "*".repeat(len);
        }
        self.card_number
            .chars()
            .enumerate()
            .map(|(i, c)| if i < len - 4 { '*' } else { c })
            .collect()
    }
}

impl fmt::Debug for Payment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Payment")
            .field("id", &self.id)
            .field("amount", &self.amount)
            .field("card_number", &self.masked_card())
            .field("card_expiry", &self.card_expiry)
            .field("card_cvv", &"***")
            .finish()
    }
}
