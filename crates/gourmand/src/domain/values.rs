use super::ValidationError;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Customer rating in whole stars. Higher is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: i32) -> Result<Self, ValidationError> {
        if value < i32::from(Self::MIN) || value > i32::from(Self::MAX) {
            return Err(ValidationError::RatingOutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }

        Ok(Self(value as u8))
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Distance from the user in miles. Lower is better.
///
/// The wrapped value is always finite and inside the accepted range, which is
/// what makes the total ordering below sound.
#[derive(Debug, Clone, Copy)]
pub struct Distance(f64);

impl Distance {
    pub const MIN: f64 = 1.0;
    pub const MAX: f64 = 10.0;

    pub fn new(miles: f64) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&miles) {
            return Err(ValidationError::DistanceOutOfRange {
                value: miles,
                min: Self::MIN,
                max: Self::MAX,
            });
        }

        Ok(Self(miles))
    }

    pub const fn miles(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mi", fixed_half_up(self.0, 1))
    }
}

/// Average price per person in dollars. Lower is better.
#[derive(Debug, Clone, Copy)]
pub struct Price(f64);

impl Price {
    pub const MIN: f64 = 10.0;
    pub const MAX: f64 = 50.0;

    pub fn new(amount: f64) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&amount) {
            return Err(ValidationError::PriceOutOfRange {
                value: amount,
                min: Self::MIN,
                max: Self::MAX,
            });
        }

        Ok(Self(amount))
    }

    pub const fn amount(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", fixed_half_up(self.0, 2))
    }
}

macro_rules! float_ordering {
    ($ty:ty) => {
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.cmp(other) == Ordering::Equal
            }
        }

        impl Eq for $ty {}

        impl PartialOrd for $ty {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $ty {
            fn cmp(&self, other: &Self) -> Ordering {
                self.0.total_cmp(&other.0)
            }
        }

        impl Hash for $ty {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.0.to_bits().hash(state);
            }
        }
    };
}

float_ordering!(Distance);
float_ordering!(Price);

/// Formats `value` with `places` decimals, rounding halves away from zero.
///
/// Rounding works on the shortest decimal form of the float, so `2.25` becomes
/// `2.3` even though the nearest binary value sits just below the half.
pub fn fixed_half_up(value: f64, places: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let shortest = value.abs().to_string();
    let (whole, fraction) = shortest
        .split_once('.')
        .unwrap_or((shortest.as_str(), ""));

    let mut digits = whole
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(places))
        .map(|digit| digit - b'0')
        .collect::<Vec<_>>();

    if fraction.as_bytes().get(places).is_some_and(|&next| next >= b'5') {
        round_up(&mut digits);
    }

    let split = digits.len() - places;
    let mut formatted = String::with_capacity(digits.len() + 2);
    if value.is_sign_negative() && value != 0.0 {
        formatted.push('-');
    }
    formatted.extend(digits[..split].iter().map(|&d| char::from(b'0' + d)));
    if places > 0 {
        formatted.push('.');
        formatted.extend(digits[split..].iter().map(|&d| char::from(b'0' + d)));
    }
    formatted
}

fn round_up(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == 9 {
            *digit = 0;
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, 1);
}
