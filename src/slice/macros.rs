#[macro_export]
macro_rules! debug_only {
     ($($stmt:stmt)*) => {
         #[cfg(debug_assertions)]
         { $($stmt)* }
    };
}

#[macro_export]
macro_rules! debug_rectangular_check {
    ($nested: expr) => {
        debug_only!(if !$nested.is_rectangular() {
            panic!(
                "The nested array is ragged! Every sibling group must match the leading shape {:?}!",
                $nested.shape()
            );
        });
    };
}
