use crate::pipe::Seq;
use rustc_hash::FxHashSet;
use std::hash::Hash;
use std::rc::Rc;
use tracing::trace;

/* **************************************** 转换 **************************************** */

/// 映射：每个元素替换为`mapper(element)`后推送，访问者的返回值原样传递。
pub fn map<T: 'static, U: 'static>(mapper: impl Fn(T) -> U + 'static) -> impl Fn(Seq<T>) -> Seq<U> {
    let mapper = Rc::new(mapper);
    move |seq: Seq<T>| {
        let mapper = mapper.clone();
        seq.wrap(move |inner, visitor| inner.traverse(|v| visitor(mapper(v))))
    }
}

/// 访问：对每个元素调用`f`，元素原样推送。
pub fn inspect<T: 'static>(f: impl Fn(&T) + 'static) -> impl Fn(Seq<T>) -> Seq<T> {
    let f = Rc::new(f);
    move |seq: Seq<T>| {
        let f = f.clone();
        seq.wrap(move |inner, visitor| {
            inner.traverse(|v| {
                f(&v);
                visitor(v)
            })
        })
    }
}

/* **************************************** 减少 **************************************** */

/// 过滤：只推送满足`predicate`的元素。
///
/// 被过滤掉的元素不会调用访问者，并向底层报告继续，因此不会导致遍历提前结束。
pub fn filter<T: 'static>(predicate: impl Fn(&T) -> bool + 'static) -> impl Fn(Seq<T>) -> Seq<T> {
    let predicate = Rc::new(predicate);
    move |seq: Seq<T>| {
        let predicate = predicate.clone();
        seq.wrap(move |inner, visitor| inner.traverse(|v| if predicate(&v) { visitor(v) } else { true }))
    }
}

/// 最多取`at_most`个元素。
///
/// 计数器在每次遍历时重新初始化。计数未用完时推送元素并传递访问者的返回值；
/// 计数用完后，下一个到达的元素不会推送给访问者，而是向底层报告停止。
pub fn take<T: 'static>(at_most: usize) -> impl Fn(Seq<T>) -> Seq<T> {
    move |seq: Seq<T>| {
        seq.wrap(move |inner, visitor| {
            let mut remaining = at_most;
            inner.traverse(|v| {
                if remaining > 0 {
                    remaining -= 1;
                    visitor(v)
                } else {
                    trace!(at_most, "take limit reached, stopping upstream");
                    false
                }
            })
        })
    }
}

/// 跳过前`at_least`个元素，之后的元素原样推送。计数器在每次遍历时重新初始化。
pub fn skip<T: 'static>(at_least: usize) -> impl Fn(Seq<T>) -> Seq<T> {
    move |seq: Seq<T>| {
        seq.wrap(move |inner, visitor| {
            let mut remaining = at_least;
            inner.traverse(|v| {
                if remaining > 0 {
                    remaining -= 1;
                    true
                } else {
                    visitor(v)
                }
            })
        })
    }
}

/// 去重：每次遍历中只推送首次出现的元素。
pub fn distinct<T: Eq + Hash + Clone + 'static>() -> impl Fn(Seq<T>) -> Seq<T> {
    distinct_by(T::clone)
}

/// 按`key`去重：每次遍历中只推送键首次出现的元素。
pub fn distinct_by<T, K>(key: impl Fn(&T) -> K + 'static) -> impl Fn(Seq<T>) -> Seq<T>
where
    T: 'static,
    K: Eq + Hash + 'static,
{
    let key = Rc::new(key);
    move |seq: Seq<T>| {
        let key = key.clone();
        seq.wrap(move |inner, visitor| {
            let mut seen = FxHashSet::default();
            inner.traverse(|v| if seen.insert(key(&v)) { visitor(v) } else { true })
        })
    }
}
