use std::fmt;
use std::ops::BitOr;
use std::rc::Rc;

/// 遍历能力标记
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Traversal {
    /// 可重复遍历，每次遍历都从头推送相同的元素。
    Repeatable,
    /// 只能遍历一次，底层状态在多次遍历之间共享，再次遍历会从上次停止处继续。
    SingleShot,
}

/// 可遍历序列。
///
/// 只包装一个遍历操作：把每个元素依次推送给访问者，直到序列耗尽或访问者返回`false`。
/// 序列本身不持有任何已物化的元素，构造后不可变，每个管道都返回包装了输入序列的新序列。
pub struct Seq<T> {
    traverse: Rc<dyn Fn(&mut dyn FnMut(T) -> bool)>,
    traversal: Traversal,
}

impl<T> Seq<T> {
    /// 由遍历闭包创建可重复遍历的序列，闭包每次调用都必须从头推送。
    pub fn new(traverse: impl Fn(&mut dyn FnMut(T) -> bool) + 'static) -> Seq<T> {
        Seq { traverse: Rc::new(traverse), traversal: Traversal::Repeatable }
    }

    /// 由遍历闭包创建只能遍历一次的序列。
    pub fn single_shot(traverse: impl Fn(&mut dyn FnMut(T) -> bool) + 'static) -> Seq<T> {
        Seq { traverse: Rc::new(traverse), traversal: Traversal::SingleShot }
    }

    /// 把元素依次推送给`visitor`，`visitor`返回`false`时立即停止。
    pub fn traverse(&self, mut visitor: impl FnMut(T) -> bool) {
        (self.traverse)(&mut visitor)
    }

    pub fn traversal(&self) -> Traversal {
        self.traversal
    }

    pub fn is_repeatable(&self) -> bool {
        self.traversal == Traversal::Repeatable
    }

    /// 正向应用：`seq.pipe(f)`等价于`f(seq)`。
    pub fn pipe<R>(self, f: impl FnOnce(Seq<T>) -> R) -> R {
        f(self)
    }
}

impl<T: 'static> Seq<T> {
    /// 以当前序列为底层，构造一个新序列，遍历能力沿用当前序列。
    pub(crate) fn wrap<U: 'static>(self, traverse: impl Fn(&Seq<T>, &mut dyn FnMut(U) -> bool) + 'static) -> Seq<U> {
        let traversal = self.traversal;
        Seq { traverse: Rc::new(move |visitor: &mut dyn FnMut(U) -> bool| traverse(&self, visitor)), traversal }
    }
}

impl<T> Clone for Seq<T> {
    fn clone(&self) -> Self {
        Seq { traverse: self.traverse.clone(), traversal: self.traversal }
    }
}

impl<T> fmt::Debug for Seq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seq").field("traversal", &self.traversal).finish_non_exhaustive()
    }
}

/// `seq | stage`等价于`stage(seq)`，用于从左到右书写流水线。
impl<T, F, R> BitOr<F> for Seq<T>
where
    F: FnOnce(Seq<T>) -> R,
{
    type Output = R;

    fn bitor(self, f: F) -> R {
        f(self)
    }
}

/// 反向应用：`apply(f, value)`等价于`f(value)`。
pub fn apply<V, R>(f: impl FnOnce(V) -> R, value: V) -> R {
    f(value)
}
