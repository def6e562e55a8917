//! Sort kernel registry.
//!
//! [`SortAlgorithm`] names every sort kernel in this crate and dispatches to
//! it, so the harness and benchmarks can iterate the full set.

use std::fmt;

use sift_kernel::seq::Key;

use crate::bubble::{bubble_sort, bubble_sort_recursive};
use crate::counting::{counting_sort, counting_sort_recursive};
use crate::error::SortError;
use crate::heap::heap_sort;
use crate::insertion::{insertion_sort, insertion_sort_recursive};
use crate::merge::merge_sort;
use crate::quick::{dual_pivot_quick_sort, quick_sort, three_way_quick_sort};
use crate::radix::radix_sort;
use crate::selection::{selection_sort, selection_sort_recursive, stable_selection_sort};

/// Every sort kernel, dispatchable by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SortAlgorithm {
    Bubble,
    BubbleRecursive,
    Insertion,
    InsertionRecursive,
    Selection,
    SelectionRecursive,
    StableSelection,
    Merge,
    Quick,
    DualPivotQuick,
    ThreeWayQuick,
    Heap,
    Counting,
    CountingRecursive,
    Radix,
}

impl SortAlgorithm {
    /// All kernels in declaration order.
    pub const ALL: &[SortAlgorithm] = &[
        Self::Bubble,
        Self::BubbleRecursive,
        Self::Insertion,
        Self::InsertionRecursive,
        Self::Selection,
        Self::SelectionRecursive,
        Self::StableSelection,
        Self::Merge,
        Self::Quick,
        Self::DualPivotQuick,
        Self::ThreeWayQuick,
        Self::Heap,
        Self::Counting,
        Self::CountingRecursive,
        Self::Radix,
    ];

    /// Stable snake-case name used in transcripts and reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::BubbleRecursive => "bubble_recursive",
            Self::Insertion => "insertion",
            Self::InsertionRecursive => "insertion_recursive",
            Self::Selection => "selection",
            Self::SelectionRecursive => "selection_recursive",
            Self::StableSelection => "stable_selection",
            Self::Merge => "merge",
            Self::Quick => "quick",
            Self::DualPivotQuick => "dual_pivot_quick",
            Self::ThreeWayQuick => "three_way_quick",
            Self::Heap => "heap",
            Self::Counting => "counting",
            Self::CountingRecursive => "counting_recursive",
            Self::Radix => "radix",
        }
    }

    /// Look a kernel up by its [`name`](Self::name).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.name() == name)
    }

    /// True if equal keys keep their relative input order.
    #[must_use]
    pub const fn is_stable(self) -> bool {
        matches!(
            self,
            Self::Bubble
                | Self::BubbleRecursive
                | Self::Insertion
                | Self::InsertionRecursive
                | Self::StableSelection
                | Self::Merge
                | Self::Counting
                | Self::CountingRecursive
                | Self::Radix
        )
    }

    /// True if the kernel rejects negative keys with [`SortError::NegativeKey`].
    #[must_use]
    pub const fn requires_non_negative(self) -> bool {
        matches!(self, Self::Counting | Self::CountingRecursive | Self::Radix)
    }

    /// True if the kernel recurses to a depth that grows with `n` or with
    /// the key range on some inputs.
    #[must_use]
    pub const fn has_linear_recursion(self) -> bool {
        matches!(
            self,
            Self::BubbleRecursive
                | Self::InsertionRecursive
                | Self::SelectionRecursive
                | Self::Quick
                | Self::DualPivotQuick
                | Self::ThreeWayQuick
                | Self::CountingRecursive
        )
    }

    /// Sort `seq` in place.
    ///
    /// # Errors
    ///
    /// Only the bounded-key kernels fail, and they leave `seq` untouched
    /// when they do.
    pub fn run(self, seq: &mut [Key]) -> Result<(), SortError> {
        match self {
            Self::Bubble => bubble_sort(seq),
            Self::BubbleRecursive => bubble_sort_recursive(seq),
            Self::Insertion => insertion_sort(seq),
            Self::InsertionRecursive => insertion_sort_recursive(seq),
            Self::Selection => selection_sort(seq),
            Self::SelectionRecursive => selection_sort_recursive(seq),
            Self::StableSelection => stable_selection_sort(seq),
            Self::Merge => merge_sort(seq),
            Self::Quick => quick_sort(seq),
            Self::DualPivotQuick => dual_pivot_quick_sort(seq),
            Self::ThreeWayQuick => three_way_quick_sort(seq),
            Self::Heap => heap_sort(seq),
            Self::Counting => return counting_sort(seq),
            Self::CountingRecursive => return counting_sort_recursive(seq),
            Self::Radix => return radix_sort(seq),
        }
        Ok(())
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
