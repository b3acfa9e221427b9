//! Data generation utilities useful for testing and benchmarking.
use rand::distr::Alphanumeric;
use rand::Rng;
use std::collections::HashSet;
use std::hash::Hash;

/// Provides capabilities to generate random values of the implementer-type.
pub trait Generate<R: Rng>: Sized {
    /// Parameters for data-generation specific for the type.
    type GenerateParams: Default;

    /// Generates a single random value of the type.
    fn generate(rng: &mut R, params: &Self::GenerateParams) -> Self;

    /// Generates **unique** random values of the type.
    ///
    /// Order follows generation, so a seeded `rng` gives reproducible output.
    ///
    /// # Panics
    ///
    /// - If `params` can't produce `size` distinct values, for example a `u8` range narrower
    ///   than `size`. This is detected only by exhausting a generous attempt budget.
    fn generate_many(rng: &mut R, params: &Self::GenerateParams, size: usize) -> Vec<Self>
    where
        Self: Hash + Eq + Clone,
    {
        let max_attempts = size.saturating_mul(64).max(1024);
        let mut seen = HashSet::with_capacity(size);
        let mut values = Vec::with_capacity(size);

        for _ in 0..max_attempts {
            if values.len() == size {
                break;
            }
            let value = Self::generate(rng, params);
            if seen.insert(value.clone()) {
                values.push(value);
            }
        }
        assert_eq!(values.len(), size, "Couldn't generate {size} unique values");
        values
    }
}

/// Parameters for [`Generate`] implementations that generate numeric values.
#[derive(Debug, Clone, Copy)]
pub struct NumParams<T> {
    min: T,
    max: T,
}

impl<T> NumParams<T> {
    /// Creates a new instance of [`NumParams`] with the specified minimum and maximum values.
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

macro_rules! impl_generate_num {
    ($($type:ty),*) => {
        $(
            impl Default for NumParams<$type> {
                fn default() -> Self {
                    Self { min: <$type>::MIN, max: <$type>::MAX }
                }
            }

            impl<R: Rng> Generate<R> for $type {
                type GenerateParams = NumParams<$type>;

                fn generate(rng: &mut R, params: &Self::GenerateParams) -> Self {
                    rng.random_range(params.min..=params.max)
                }
            }
        )*
    };
}

impl_generate_num!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize);

/// Parameters for [`Generate`] implementations that generate strings.
#[derive(Debug, Clone, Copy)]
pub struct StringParams {
    min_length: usize,
    max_length: usize,
    mixed_case: bool,
}

impl StringParams {
    pub fn new(min_length: usize, max_length: usize) -> Self {
        Self {
            min_length,
            max_length,
            mixed_case: true,
        }
    }

    /// Restrict generated strings to lowercase letters and digits.
    ///
    /// Strings that are distinct under this setting stay distinct under case-insensitive
    /// comparison.
    pub fn lowercase(self) -> Self {
        Self {
            mixed_case: false,
            ..self
        }
    }
}

impl Default for StringParams {
    fn default() -> Self {
        Self::new(1, 64)
    }
}

impl<R: Rng> Generate<R> for String {
    type GenerateParams = StringParams;

    fn generate(rng: &mut R, params: &Self::GenerateParams) -> Self {
        let length = rng.random_range(params.min_length..=params.max_length);
        let chars = rng.sample_iter(&Alphanumeric).take(length).map(char::from);
        if params.mixed_case {
            chars.collect()
        } else {
            chars.map(|c| c.to_ascii_lowercase()).collect()
        }
    }
}
