#[macro_export]
macro_rules! s {
    ($range: expr) => {
        crate::slice::slice::Slice::from($range)
    };

    ($range: expr, $step: expr) => {
        crate::slice::slice::Slice::from($range).with_step($step)
    };
}

#[macro_export]
macro_rules! nested {
    ([$($item: tt),* $(,)?]) => {
        crate::slice::nested::Nested::Array(vec![$(nested!($item)),*])
    };

    ($value: expr) => {
        crate::slice::nested::Nested::Scalar($value)
    };
}

pub mod arange {
    #[macro_export]
    macro_rules! arange {
        ($size: expr) => {
            crate::slice::arange::_arange_default($size)
        };

        ($start: expr, $end: expr) => {
            crate::slice::arange::_arange_start($start, $end)
        };

        ($start: expr, $end: expr, $step: expr) => {
            crate::slice::arange::_arange_step($start, $end, $step)
        };
    }

    pub fn _arange_default(size: i64) -> Vec<i64> {
        (0..size).collect()
    }

    pub fn _arange_start(start: i64, end: i64) -> Vec<i64> {
        (start..end).collect()
    }

    pub fn _arange_step(start: i64, end: i64, step: i64) -> Vec<i64> {
        (start..end).step_by(step as usize).collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::arange;

    #[test]
    fn arange_variants() {
        assert_eq!(arange![5], vec![0, 1, 2, 3, 4]);
        assert_eq!(arange![2, 5], vec![2, 3, 4]);
        assert_eq!(arange![0, 10, 3], vec![0, 3, 6, 9]);
    }

    #[test]
    fn slice_macro_matches_tagged_form() {
        let via_macro: Vec<usize> = s![2..5, 2].resolve(10).unwrap().collect();
        let tagged: Vec<usize> = crate::slice::Slice::new(Some(2), Some(5), Some(2))
            .resolve(10)
            .unwrap()
            .collect();

        assert_eq!(via_macro, tagged);
    }
}
