//! ファイル名衝突解消モジュール
//!
//! アーカイブ内のエントリ名 `<名前>.<拡張子>` が重複しないよう、
//! 入力順に `_1`, `_2`, ... を付与する。

use std::collections::HashSet;

/// 重複しない名前に解決する
///
/// 入力と同じ順序で、解決後の名前（拡張子なし）を返す。
/// 入力順が安定していれば結果も決定的。
///
/// # Examples
/// ```
/// use photo_rename_common::collision::resolve_unique_names;
///
/// let pairs = [("diet_person_1_walking", "jpg"), ("diet_person_1_walking", "jpg")];
/// let names = resolve_unique_names(&pairs);
/// assert_eq!(names, vec!["diet_person_1_walking", "diet_person_1_walking_1"]);
/// ```
pub fn resolve_unique_names<N, E>(pairs: &[(N, E)]) -> Vec<String>
where
    N: AsRef<str>,
    E: AsRef<str>,
{
    let mut assigned: HashSet<String> = HashSet::new();
    let mut resolved = Vec::with_capacity(pairs.len());

    for (name, ext) in pairs {
        let (name, ext) = (name.as_ref(), ext.as_ref());
        let mut candidate = name.to_string();
        let mut suffix = 1;

        while assigned.contains(&entry_name(&candidate, ext)) {
            candidate = format!("{}_{}", name, suffix);
            suffix += 1;
        }

        assigned.insert(entry_name(&candidate, ext));
        resolved.push(candidate);
    }

    resolved
}

/// アーカイブのエントリ名
pub fn entry_name(name: &str, ext: &str) -> String {
    format!("{}.{}", name, ext)
}
