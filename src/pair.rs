use std::path::PathBuf;

use crate::bundle::{BundleError, BundleResult};

/// 埋め込む変数名とファイルパスの組。
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetPair {
    pub name: String,
    pub path: PathBuf,
}

impl AssetPair {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// 位置引数を先頭から2つずつ (名前, パス) の組にまとめる。
    ///
    /// 引数の個数が奇数の場合、strict なら `OddArgumentCount` を返し、
    /// さもなくば末尾の余りを捨てる。
    pub fn from_args<I, S>(args: I, strict: bool) -> BundleResult<Vec<Self>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();

        if args.len() % 2 != 0 {
            if strict {
                return Err(BundleError::OddArgumentCount { count: args.len() });
            }
            log::warn!("ignoring unpaired trailing argument: {}", args[args.len() - 1]);
        }

        let pairs = args
            .chunks_exact(2)
            .map(|chunk| Self::new(chunk[0].as_str(), chunk[1].as_str()))
            .collect();

        Ok(pairs)
    }
}
