//! 惰性、推送式的序列组合子。
//!
//! 数据源（[`input`]）产生可遍历序列[`Seq`]，管道（[`op`]）把一个序列包装成另一个序列，
//! 终端（[`output`]）驱动遍历并得到结果。流水线由普通的函数应用组合而成，中间不物化任何容器：
//!
//! ```
//! use rseq::*;
//!
//! let res = from_range(10..=20)
//!     | skip(2)
//!     | filter(|v: &i32| v % 2 == 0)
//!     | take(2)
//!     | map(|v: i32| v + 1)
//!     | to_array();
//! assert_eq!(res, vec![13, 15]);
//!
//! let res = apply(to_array(), apply(take(3), from_range(1..=i64::MAX)));
//! assert_eq!(res, vec![1, 2, 3]);
//! ```

pub mod err;
pub mod input;
pub mod op;
pub mod output;
pub mod pipe;

pub use err::SeqErr;
pub use input::{empty, from_array, from_generator, from_iter, from_range, from_start, from_string, repeat};
pub use op::{distinct, distinct_by, filter, inspect, map, skip, take};
pub use output::{count, first, fold, for_each, join, last, single, to_array, to_string, try_fold};
pub use pipe::{Seq, Traversal, apply};

pub type SeqRes<T> = Result<T, SeqErr>;
