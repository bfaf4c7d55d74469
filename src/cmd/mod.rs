// extsort-rs: Extension Bucket Sorter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command handlers.
//!
//! ```text
//! sort:  run_sort_command()  validate source --> Sorter::run --> "process done"
//! ```

pub mod sort;
