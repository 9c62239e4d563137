// Ordered Sequence Editor
//
// 有序集合的通用编辑操作：追加、按 ID 替换/删除、相邻交换排序
// 所有操作为纯函数，返回新序列；未命中或越界时静默保持原序列不变

use super::ids::IdGenerator;

/// 以字符串 ID 为键的序列项
///
/// 序列内部的 ID 在任意时刻保持唯一，新项的 ID 由变更层分配
pub trait Keyed: Clone {
    fn id(&self) -> &str;

    /// 创建或替换时由变更层写入 ID，调用方传入的 ID 不被信任
    fn assign_id(&mut self, id: String);
}

/// 序列编辑操作
#[derive(Debug, Clone)]
pub enum SequenceEdit<T> {
    /// 追加新项到末尾，ID 由生成器分配
    Append(T),
    /// 按 ID 替换，未命中时序列不变
    Replace { id: String, item: T },
    /// 按 ID 删除，未命中时序列不变
    Remove { id: String },
    /// 与上一项交换，索引 0 为空操作
    MoveUp { index: usize },
    /// 与下一项交换，末尾索引为空操作
    MoveDown { index: usize },
    /// 整体替换（重排序或批量编辑后使用）
    ReplaceAll(Vec<T>),
}

/// 追加新项，ID 在 `scope` 命名空间下新分配
///
/// 生成的 ID 与序列内现有项冲突时重新抽取，序列内 ID 始终唯一
pub fn append<T: Keyed>(
    sequence: &[T],
    mut item: T,
    ids: &dyn IdGenerator,
    scope: &str,
) -> Vec<T> {
    let mut id = ids.next_id(scope);
    while sequence.iter().any(|existing| existing.id() == id) {
        id = ids.next_id(scope);
    }
    item.assign_id(id);
    let mut next = sequence.to_vec();
    next.push(item);
    next
}

/// 按 ID 替换匹配项，替换后的项保持原 ID
pub fn replace<T: Keyed>(sequence: &[T], id: &str, mut item: T) -> Vec<T> {
    item.assign_id(id.to_string());
    sequence
        .iter()
        .map(|existing| {
            if existing.id() == id {
                item.clone()
            } else {
                existing.clone()
            }
        })
        .collect()
}

/// 按 ID 过滤掉匹配项
pub fn remove<T: Keyed>(sequence: &[T], id: &str) -> Vec<T> {
    sequence
        .iter()
        .filter(|existing| existing.id() != id)
        .cloned()
        .collect()
}

/// 与上一项交换位置
pub fn move_up<T: Clone>(sequence: &[T], index: usize) -> Vec<T> {
    let mut next = sequence.to_vec();
    if index == 0 || index >= next.len() {
        return next;
    }
    next.swap(index, index - 1);
    next
}

/// 与下一项交换位置
pub fn move_down<T: Clone>(sequence: &[T], index: usize) -> Vec<T> {
    let mut next = sequence.to_vec();
    if next.is_empty() || index >= next.len() - 1 {
        return next;
    }
    next.swap(index, index + 1);
    next
}

/// 应用一次编辑操作，返回新序列
pub fn apply<T: Keyed>(
    sequence: &[T],
    edit: SequenceEdit<T>,
    ids: &dyn IdGenerator,
    scope: &str,
) -> Vec<T> {
    match edit {
        SequenceEdit::Append(item) => append(sequence, item, ids, scope),
        SequenceEdit::Replace { id, item } => replace(sequence, &id, item),
        SequenceEdit::Remove { id } => remove(sequence, &id),
        SequenceEdit::MoveUp { index } => move_up(sequence, index),
        SequenceEdit::MoveDown { index } => move_down(sequence, index),
        SequenceEdit::ReplaceAll(items) => items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::ids::SequentialIds;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: String,
        label: String,
    }

    impl Item {
        fn new(id: &str, label: &str) -> Self {
            Self {
                id: id.to_string(),
                label: label.to_string(),
            }
        }
    }

    impl Keyed for Item {
        fn id(&self) -> &str {
            &self.id
        }

        fn assign_id(&mut self, id: String) {
            self.id = id;
        }
    }

    fn sample() -> Vec<Item> {
        vec![
            Item::new("a", "first"),
            Item::new("b", "second"),
            Item::new("c", "third"),
        ]
    }

    #[test]
    fn test_append_assigns_fresh_id() {
        let ids = SequentialIds::new();
        let next = append(&sample(), Item::new("ignored", "fourth"), &ids, "");

        assert_eq!(next.len(), 4);
        assert_eq!(next[3].id, "1");
        assert_eq!(next[3].label, "fourth");
    }

    #[test]
    fn test_append_skips_ids_already_in_sequence() {
        let ids = SequentialIds::new();
        let occupied = vec![Item::new("1", "first"), Item::new("2", "second")];

        let next = append(&occupied, Item::new("", "third"), &ids, "");

        assert_eq!(next[2].id, "3");
        let mut seen: Vec<&str> = next.iter().map(|i| i.id.as_str()).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), next.len());
    }

    #[test]
    fn test_append_remove_round_trip() {
        let ids = SequentialIds::new();
        let original = sample();

        let appended = append(&original, Item::new("", "temp"), &ids, "");
        let appended_id = appended[appended.len() - 1].id.clone();
        let restored = remove(&appended, &appended_id);

        assert_eq!(restored, original);
    }

    #[test]
    fn test_replace_keeps_target_id() {
        let next = replace(&sample(), "b", Item::new("whatever", "updated"));

        assert_eq!(next[1].id, "b");
        assert_eq!(next[1].label, "updated");
        assert_eq!(next[0], Item::new("a", "first"));
    }

    #[test]
    fn test_replace_miss_is_identity() {
        let original = sample();
        let next = replace(&original, "zz", Item::new("zz", "ghost"));
        assert_eq!(next, original);
    }

    #[test]
    fn test_remove_miss_is_identity() {
        let original = sample();
        let next = remove(&original, "zz");
        assert_eq!(next, original);
    }

    #[test]
    fn test_move_up_swaps_adjacent() {
        let next = move_up(&sample(), 1);
        assert_eq!(next[0].id, "b");
        assert_eq!(next[1].id, "a");
        assert_eq!(next[2].id, "c");
    }

    #[test]
    fn test_move_up_at_head_is_noop() {
        let original = sample();
        assert_eq!(move_up(&original, 0), original);
    }

    #[test]
    fn test_move_down_at_tail_is_noop() {
        let original = sample();
        assert_eq!(move_down(&original, original.len() - 1), original);
    }

    #[test]
    fn test_out_of_range_index_is_noop() {
        let original = sample();
        assert_eq!(move_up(&original, 99), original);
        assert_eq!(move_down(&original, 99), original);
    }

    #[test]
    fn test_move_down_then_up_round_trips() {
        let original = sample();

        for index in 0..original.len() - 1 {
            let shifted = move_down(&original, index);
            let restored = move_up(&shifted, index + 1);
            assert_eq!(restored, original);
        }
    }

    #[test]
    fn test_apply_replace_all() {
        let ids = SequentialIds::new();
        let replacement = vec![Item::new("x", "only")];
        let next = apply(
            &sample(),
            SequenceEdit::ReplaceAll(replacement.clone()),
            &ids,
            "",
        );
        assert_eq!(next, replacement);
    }

    #[test]
    fn test_apply_append_uses_scope() {
        let ids = SequentialIds::new();
        let next = apply(
            &sample(),
            SequenceEdit::Append(Item::new("", "nested")),
            &ids,
            "col-7",
        );
        assert_eq!(next[3].id, "col-7-1");
    }
}
