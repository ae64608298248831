use crate::pipe::Seq;
use std::cell::RefCell;
use std::iter::repeat_n;
use std::ops::Range;
use std::rc::Rc;
use tracing::trace;

/// 由生成函数创建序列。
///
/// 反复调用`generator`，每次得到的值推送给访问者，直到`generator`返回`None`或访问者要求停止。
/// 生成函数的状态在多次遍历之间共享，因此序列只能遍历一次：再次遍历从上次停止处继续。
///
/// # Panics
/// 在访问者内部再次遍历同一个序列时panic。
pub fn from_generator<T: 'static>(generator: impl FnMut() -> Option<T> + 'static) -> Seq<T> {
    let generator = RefCell::new(generator);
    Seq::single_shot(move |visitor| {
        let mut guard = generator.borrow_mut();
        let generate = &mut *guard;
        while let Some(v) = generate() {
            if !visitor(v) {
                return;
            }
        }
        trace!("generator exhausted");
    })
}

/// 由外部迭代器创建只能遍历一次的序列。
pub fn from_iter<I>(iter: I) -> Seq<I::Item>
where
    I: IntoIterator,
    I::IntoIter: 'static,
    I::Item: 'static,
{
    let mut iter = iter.into_iter();
    from_generator(move || iter.next())
}

/// 由数组创建序列，按顺序推送每个元素的克隆。
pub fn from_array<T: Clone + 'static>(values: impl Into<Rc<[T]>>) -> Seq<T> {
    let values = values.into();
    Seq::new(move |visitor| {
        for v in values.iter() {
            if !visitor(v.clone()) {
                break;
            }
        }
    })
}

/// 由字符串创建序列，按顺序推送每个字符。
pub fn from_string(text: impl Into<Rc<str>>) -> Seq<char> {
    let text = text.into();
    Seq::new(move |visitor| {
        for c in text.chars() {
            if !visitor(c) {
                break;
            }
        }
    })
}

/// 由范围创建序列，支持`a..b`和`a..=b`，每次遍历都从范围起点开始。
pub fn from_range<R>(range: R) -> Seq<R::Item>
where
    R: IntoIterator + Clone + 'static,
    R::Item: 'static,
{
    Seq::new(move |visitor| {
        for v in range.clone() {
            if !visitor(v) {
                break;
            }
        }
    })
}

/// 半开区间`[start, to_end)`。
pub fn from_start<T>(start: T, to_end: T) -> Seq<T>
where
    Range<T>: Iterator<Item = T> + Clone + 'static,
    T: 'static,
{
    from_range(start..to_end)
}

/// 重复字面值，`count`为`None`时无限重复，需要配合`take`等管道截断。
pub fn repeat<T: Clone + 'static>(value: T, count: Option<usize>) -> Seq<T> {
    Seq::new(move |visitor| match count {
        Some(count) => {
            for v in repeat_n(value.clone(), count) {
                if !visitor(v) {
                    break;
                }
            }
        }
        None => while visitor(value.clone()) {},
    })
}

pub fn empty<T: 'static>() -> Seq<T> {
    Seq::new(|_| {})
}
