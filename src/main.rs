use crate::slice::{Nested, Slice, SliceError, print_nested};

mod slice;

fn main() -> Result<(), SliceError> {
    tracing_subscriber::fmt().init();

    let arr = arange![10];

    // Forward slices over the same sequence.
    print_nested(&Nested::from(s![..].gather(&arr)?));
    print_nested(&Nested::from(s![2..].gather(&arr)?));
    print_nested(&Nested::from(s![-4..].gather(&arr)?));
    print_nested(&Nested::from(s![..5].gather(&arr)?));
    print_nested(&Nested::from(s![..-3].gather(&arr)?));
    print_nested(&Nested::from(s![2..5].gather(&arr)?));
    print_nested(&Nested::from(s![-4..-1].gather(&arr)?));
    print_nested(&Nested::from(s![2..5, 2].gather(&arr)?));
    print_nested(&Nested::from(s![-4..-1, 2].gather(&arr)?));

    // Reversed and strided slices.
    print_nested(&Nested::from(Slice::full().with_step(-3).gather(&arr)?));
    print_nested(&Nested::from(s![2.., -1].gather(&arr)?));
    print_nested(&Nested::from(s![-4.., -4].gather(&arr)?));
    print_nested(&Nested::from(s![..5, 2].gather(&arr)?));
    print_nested(&Nested::from(s![..-3, -3].gather(&arr)?));

    // The tagged form, for slices no range literal spells.
    print_nested(&Nested::from(Slice::new(Some(2), Some(5), Some(5)).gather(&arr)?));
    print_nested(&Nested::from(Slice::new(Some(-4), Some(-1), Some(-1)).gather(&arr)?));

    let data = nested!([
        [[1, 2, 3], [4, 5, 6], [7, 8, 9]],
        [[10, 11, 12], [13, 14, 15], [16, 17, 18]],
        [[19, 20, 21], [22, 23, 24], [25, 26, 27]]
    ]);

    print_nested(&data);
    println!("dim: {} shape: {:?}", data.ndim(), data.shape());

    let mut tail = arr.clone();
    s![4..].assign_scalar(&mut tail, 100)?;
    print_nested(&Nested::from(tail));

    Ok(())
}
