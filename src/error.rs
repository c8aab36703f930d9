use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouletteError {
    #[error("invalid wheel configuration: {black} black, {red} red, {green} green slots (total must be at least 1 and fit in usize)")]
    InvalidConfiguration {
        black: usize,
        red: usize,
        green: usize,
    },

    #[error("slot index {index} out of range for a wheel of {len} slots")]
    IndexOutOfRange { index: usize, len: usize },
}
