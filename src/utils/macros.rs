#[macro_export]
macro_rules! min {
    ( $a:expr $(, $tail:expr)+ ) => ({
        let first = $a;
        let other = $crate::min!($($tail),+);
        if first < other {
            first
        } else {
            other
        }
    });
    ( $a:expr ) => ($a);
}

#[macro_export]
macro_rules! max {
    ( $a:expr $(, $tail:expr)+ ) => ({
        let first = $a;
        let other = $crate::max!($($tail),+);
        if first > other {
            first
        } else {
            other
        }
    });
    ( $a:expr ) => ($a);
}
