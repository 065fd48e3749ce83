use std::fmt::{Display, Debug};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum PtrArrayError {
    IndexOutOfBounds { index: usize, len: usize },
    NullElement,
}

impl Display for PtrArrayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PtrArrayError::IndexOutOfBounds { index, len } => write!(f, "Index {} is out of bounds for array of length {}", index, len),
            PtrArrayError::NullElement => Display::fmt("Array elements can not be null", f),
        }
    }
}

impl Debug for PtrArrayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl std::error::Error for PtrArrayError {}

#[cfg(test)]
mod error_tests {
    use crate::PtrArrayError;

    #[test]
    fn messages() {
        assert_eq!(
            "Index 3 is out of bounds for array of length 3",
            PtrArrayError::IndexOutOfBounds { index: 3, len: 3 }.to_string()
        );
        assert_eq!("Array elements can not be null", PtrArrayError::NullElement.to_string());
    }

    #[test]
    fn boxes_into_dyn_error() {
        let err: Box<dyn std::error::Error> = Box::new(PtrArrayError::NullElement);
        assert_eq!("Array elements can not be null", format!("{}", err));
    }
}
