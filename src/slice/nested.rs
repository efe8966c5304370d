use std::fmt;

use crate::{debug_only, debug_rectangular_check};

/// A recursively rectangular array of values.
///
/// The rendering and the shape accessors assume every sibling group at
/// a given depth shares one shape. Nothing enforces that in release
/// builds; [`print_nested`] checks it in debug builds only.
#[derive(Clone, Debug, PartialEq)]
pub enum Nested<T> {
    Scalar(T),
    Array(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Nesting depth, counted by descending first children.
    pub fn ndim(&self) -> usize {
        match self {
            Nested::Scalar(_) => 0,
            Nested::Array(items) => 1 + items.first().map_or(0, Nested::ndim),
        }
    }

    /// Dimension sizes, read off the leading spine of the value.
    pub fn shape(&self) -> Vec<usize> {
        let mut shape = Vec::new();
        let mut node = self;

        while let Nested::Array(items) = node {
            shape.push(items.len());

            match items.first() {
                Some(first) => node = first,
                None => break,
            }
        }

        shape
    }

    /// Whether every sibling group shares the shape of its leading
    /// sibling, at every depth.
    pub fn is_rectangular(&self) -> bool {
        match self {
            Nested::Scalar(_) => true,
            Nested::Array(items) => {
                items.iter().all(Nested::is_rectangular)
                    && items.windows(2).all(|pair| pair[0].shape() == pair[1].shape())
            }
        }
    }
}

impl<T> From<Vec<T>> for Nested<T> {
    fn from(values: Vec<T>) -> Self {
        Nested::Array(values.into_iter().map(Nested::Scalar).collect())
    }
}

impl<T: fmt::Display> fmt::Display for Nested<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Nested::Scalar(value) => write!(f, "{}, ", value),
            Nested::Array(items) => {
                write!(f, "{{")?;

                for item in items {
                    write!(f, "{}", item)?;
                }

                write!(f, "}}, \n")
            }
        }
    }
}

/// Render `value` to standard output, one brace group per dimension.
pub fn print_nested<T: fmt::Display>(value: &Nested<T>) {
    debug_rectangular_check!(value);

    print!("{}", value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_renders_with_separator() {
        assert_eq!(nested!(5).to_string(), "5, ");
    }

    #[test]
    fn one_brace_group_per_dimension() {
        assert_eq!(
            nested!([[1, 2], [3, 4]]).to_string(),
            "{{1, 2, }, \n{3, 4, }, \n}, \n"
        );

        assert_eq!(
            nested!([[[1, 2], [3, 4]], [[5, 6], [7, 8]]]).to_string(),
            "{{{1, 2, }, \n{3, 4, }, \n}, \n{{5, 6, }, \n{7, 8, }, \n}, \n}, \n"
        );
    }

    #[test]
    fn vec_conversion_is_one_dimensional() {
        let row = Nested::from(vec![2, 3, 4]);

        assert_eq!(row.to_string(), "{2, 3, 4, }, \n");
        assert_eq!(row.ndim(), 1);
        assert_eq!(row.shape(), vec![3]);
    }

    #[test]
    fn empty_array_still_closes_its_group() {
        let empty = Nested::<i64>::Array(vec![]);

        assert_eq!(empty.to_string(), "{}, \n");
        assert_eq!(empty.shape(), vec![0]);
        assert!(empty.is_rectangular());
    }

    #[test]
    fn shape_of_three_level_block() {
        let data = nested!([
            [[1, 2, 3], [4, 5, 6], [7, 8, 9]],
            [[10, 11, 12], [13, 14, 15], [16, 17, 18]],
            [[19, 20, 21], [22, 23, 24], [25, 26, 27]]
        ]);

        assert_eq!(data.ndim(), 3);
        assert_eq!(data.shape(), vec![3, 3, 3]);
        assert!(data.is_rectangular());
    }

    #[test]
    fn ragged_values_are_detected() {
        assert!(!nested!([[1, 2], [3]]).is_rectangular());
        assert!(!nested!([[[1], [2]], [3, 4]]).is_rectangular());
        assert!(nested!([[1, 2], [3, 4], [5, 6]]).is_rectangular());
    }
}
