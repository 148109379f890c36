// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod cli;
mod cmd_month;
mod cmd_view;
mod config;
mod tui;
mod util;

pub use crate::cli::{Cli, Commands, run};
