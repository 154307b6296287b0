//! メンバー詳細の選択状態
//!
//! 詳細オーバーレイに表示するメンバーを高々1人だけ保持する。

use crate::types::TeamMember;

/// 選択状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Closed,
    Open,
}

/// 選択コントローラ
///
/// 名簿に含まれるメンバーかどうかは検証しない（呼び出し側の責務）。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionController {
    selected: Option<TeamMember>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// メンバーを選択（既存の選択は置き換える）
    pub fn select(&mut self, member: TeamMember) {
        log::debug!("member selected: {}", member.name);
        self.selected = Some(member);
    }

    /// 選択を解除（未選択なら何もしない）
    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&TeamMember> {
        self.selected.as_ref()
    }

    pub fn state(&self) -> SelectionState {
        if self.selected.is_some() {
            SelectionState::Open
        } else {
            SelectionState::Closed
        }
    }

    pub fn is_open(&self) -> bool {
        self.state() == SelectionState::Open
    }

    /// 指定メンバーが選択中か（名前で比較）
    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.as_ref().is_some_and(|m| m.name == name)
    }
}
