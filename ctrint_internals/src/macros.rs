//! Macros for export

/// A basic for loop for const contexts
#[macro_export]
macro_rules! const_for {
    ($i:ident in $range:block $b:block) => {
        let mut $i: usize = $range.start.wrapping_sub(1);
        loop {
            // the increment must happen before `$b` so that `continue`s still cause it
            $i = $i.wrapping_add(1);
            if $i >= $range.end {
                break
            }
            $b;
        }
    };
    ($i:ident in $range:block.rev() $b:block) => {
        let mut $i: usize = $range.end;
        loop {
            if $i <= $range.start {
                break
            }
            $i = $i.wrapping_sub(1);
            $b;
        }
    };
}

#[test]
fn const_for_order() {
    let mut forward = [0usize; 4];
    let mut n = 0;
    const_for!(i in {0..4usize} {
        forward[n] = i;
        n += 1;
    });
    assert_eq!(forward, [0, 1, 2, 3]);
    let mut backward = [0usize; 4];
    let mut n = 0;
    const_for!(i in {0..4usize}.rev() {
        backward[n] = i;
        n += 1;
    });
    assert_eq!(backward, [3, 2, 1, 0]);
    // empty ranges run nothing
    const_for!(i in {2..2usize} {
        panic!("{i}");
    });
}
