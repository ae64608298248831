use crate::SeqRes;
use crate::err::SeqErr;
use crate::pipe::Seq;
use std::convert::Infallible;
use std::fmt::Display;
use tracing::trace;

/// 折叠：从`initial`开始，对每个元素执行`acc = folder(acc, element)`，不会提前停止。
pub fn fold<T, U>(initial: U, mut folder: impl FnMut(U, T) -> U) -> impl FnOnce(Seq<T>) -> U {
    move |seq: Seq<T>| match try_fold(initial, move |acc, v| Ok::<U, Infallible>(folder(acc, v)))(seq) {
        Ok(acc) => acc,
        Err(never) => match never {},
    }
}

/// 可失败的折叠：`folder`返回`Err`时立即停止遍历并返回该错误。
///
/// 出错后底层若仍继续推送，`folder`不会再被调用。
pub fn try_fold<T, U, E>(
    initial: U, mut folder: impl FnMut(U, T) -> Result<U, E>,
) -> impl FnOnce(Seq<T>) -> Result<U, E> {
    move |seq: Seq<T>| {
        let mut state = Some(Ok(initial));
        seq.traverse(|v| match state.take() {
            Some(Ok(acc)) => {
                let next = folder(acc, v);
                let go_on = next.is_ok();
                state = Some(next);
                go_on
            }
            stopped => {
                state = stopped;
                false
            }
        });
        // 每一步取出的状态都会放回
        let res = state.unwrap_or_else(|| unreachable!("fold state is put back after every step"));
        if res.is_err() {
            trace!("try_fold stopped on error");
        }
        res
    }
}

pub fn to_array<T>() -> impl Fn(Seq<T>) -> Vec<T> {
    |seq: Seq<T>| {
        let mut out = Vec::new();
        seq.traverse(|v| {
            out.push(v);
            true
        });
        trace!(len = out.len(), "to_array finished");
        out
    }
}

pub fn to_string() -> impl Fn(Seq<char>) -> String {
    |seq: Seq<char>| {
        let mut out = String::new();
        seq.traverse(|c| {
            out.push(c);
            true
        });
        trace!(len = out.len(), "to_string finished");
        out
    }
}

/// 以`sep`连接每个元素的`Display`输出。
pub fn join<T: Display>(sep: impl Into<String>) -> impl Fn(Seq<T>) -> String {
    let sep = sep.into();
    move |seq: Seq<T>| {
        let mut out = String::new();
        let mut first = true;
        seq.traverse(|v| {
            if !first {
                out.push_str(&sep);
            }
            first = false;
            out.push_str(&v.to_string());
            true
        });
        out
    }
}

/// 取第一个元素后立即停止遍历，序列为空时返回`None`。
pub fn first<T>() -> impl Fn(Seq<T>) -> Option<T> {
    |seq: Seq<T>| {
        let mut found = None;
        seq.traverse(|v| {
            found = Some(v);
            false
        });
        if found.is_some() {
            trace!("first found, traversal stopped");
        }
        found
    }
}

pub fn last<T>() -> impl Fn(Seq<T>) -> Option<T> {
    |seq: Seq<T>| {
        let mut found = None;
        seq.traverse(|v| {
            found = Some(v);
            true
        });
        found
    }
}

/// 要求序列恰好只有一个元素，遇到第二个元素时立即停止遍历。
pub fn single<T>() -> impl Fn(Seq<T>) -> SeqRes<T> {
    |seq: Seq<T>| {
        let mut found = None;
        let mut more = false;
        seq.traverse(|v| {
            if found.is_none() {
                found = Some(v);
                true
            } else {
                more = true;
                false
            }
        });
        match found {
            None => Err(SeqErr::Empty),
            Some(_) if more => {
                trace!("single saw a second element, traversal stopped");
                Err(SeqErr::MoreThanOne)
            }
            Some(v) => Ok(v),
        }
    }
}

pub fn count<T>() -> impl Fn(Seq<T>) -> usize {
    |seq: Seq<T>| {
        let mut n = 0;
        seq.traverse(|_| {
            n += 1;
            true
        });
        trace!(count = n, "count finished");
        n
    }
}

pub fn for_each<T>(mut f: impl FnMut(T)) -> impl FnOnce(Seq<T>) {
    move |seq: Seq<T>| {
        seq.traverse(|v| {
            f(v);
            true
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{empty, from_array, from_range, from_string, repeat};
    use crate::op::{filter, map};

    /// 第二次被拉取时panic的数据源
    fn panics_on_second_pull() -> Seq<i32> {
        Seq::new(|visitor| {
            if visitor(42) {
                panic!("pulled a second element after stop");
            }
        })
    }

    #[test]
    fn test_fold() {
        assert_eq!(fold(1, |a: i32, b: i32| a + b)(from_range(1..1)), 1);
        assert_eq!(fold(0, |a: i32, b: i32| a + b)(from_range(1..=10)), 55);
        let reverse = fold(String::new(), |mut s: String, c: char| {
            s.insert(0, c);
            s
        });
        assert_eq!(reverse(from_string("abc")), "cba");
    }

    #[test]
    fn test_fold_is_triangular_sum() {
        for k in [0i64, 1, 2, 10, 1000] {
            assert_eq!(fold(0, |a: i64, b: i64| a + b)(from_range(1..=k)), k * (k + 1) / 2);
        }
    }

    #[test]
    fn test_try_fold() {
        let checked_sum = |limit: i32| {
            try_fold(0, move |a: i32, b: i32| {
                if a + b > limit { Err(format!("overflow at {b}")) } else { Ok(a + b) }
            })
        };
        assert_eq!(checked_sum(100)(from_range(1..=10)), Ok(55));
        assert_eq!(checked_sum(10)(from_range(1..=10)), Err(String::from("overflow at 5")));
        assert_eq!(checked_sum(10)(empty()), Ok(0));
    }

    #[test]
    fn test_try_fold_stops_on_error() {
        let res: Result<i32, &str> = try_fold(0, |_, _| Err("boom"))(panics_on_second_pull());
        assert_eq!(res, Err("boom"));
    }

    #[test]
    fn test_try_fold_ignores_pushes_after_error() {
        let pushes_after_stop = Seq::<i32>::new(|visitor| {
            for v in 1..=5 {
                visitor(v);
            }
        });
        let mut calls = 0;
        let res = try_fold(0, |a: i32, b: i32| {
            calls += 1;
            if b == 3 { Err(b) } else { Ok(a + b) }
        })(pushes_after_stop.clone());
        assert_eq!(res, Err(3));
        assert_eq!(calls, 3);
        assert_eq!(fold(0, |a: i32, b: i32| a + b)(pushes_after_stop), 15);
    }

    #[test]
    fn test_to_array() {
        assert_eq!(to_array()(from_range(1..1)), Vec::<i32>::new());
        assert_eq!(to_array()(from_range(1..=10)), (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_to_string() {
        assert_eq!(to_string()(from_string("")), "");
        assert_eq!(to_string()(from_string("19740531")), "19740531");
        assert_eq!(to_string()(map(|c: char| c.to_ascii_uppercase())(from_string("rseq"))), "RSEQ");
    }

    #[test]
    fn test_join() {
        assert_eq!(join(", ")(from_array(Vec::<i32>::new())), "");
        assert_eq!(join(", ")(from_array(vec![1])), "1");
        assert_eq!(join(", ")(from_range(1..=4)), "1, 2, 3, 4");
        assert_eq!(join("")(from_string("abc")), "abc");
        assert_eq!(join(" | ")(from_array(vec![1.5, -2.0])), "1.5 | -2");
        assert_eq!(join(String::from("/"))(from_array(vec!["usr", "local"])), "usr/local");
    }

    #[test]
    fn test_first() {
        assert_eq!(first()(from_range(1..1)), None::<i32>);
        assert_eq!(first()(from_array(vec![10, 11, 12])), Some(10));
        assert_eq!(first()(filter(|v: &i32| *v > 11)(from_array(vec![10, 11, 12]))), Some(12));
    }

    #[test]
    fn test_first_does_not_traverse_past_first() {
        assert_eq!(first()(panics_on_second_pull()), Some(42));
    }

    #[test]
    fn test_last() {
        assert_eq!(last()(empty::<i32>()), None);
        assert_eq!(last()(from_range(1..=10)), Some(10));
    }

    #[test]
    fn test_single() {
        assert_eq!(single()(empty::<i32>()), Err(SeqErr::Empty));
        assert_eq!(single()(from_array(vec![7])), Ok(7));
        assert_eq!(single()(from_range(1..=3)), Err(SeqErr::MoreThanOne));
    }

    #[test]
    fn test_single_stops_at_second_element() {
        let seq = Seq::<i32>::new(|visitor| {
            if visitor(1) && visitor(2) {
                panic!("pulled a third element after stop");
            }
        });
        assert_eq!(single()(seq), Err(SeqErr::MoreThanOne));
    }

    #[test]
    fn test_count() {
        assert_eq!(count()(empty::<i32>()), 0);
        assert_eq!(count()(from_string("hello")), 5);
        assert_eq!(count()(repeat('x', Some(4))), 4);
    }

    #[test]
    fn test_for_each() {
        let mut seen = Vec::new();
        for_each(|v| seen.push(v))(from_range(1..=3));
        assert_eq!(seen, vec![1, 2, 3]);
    }
}
