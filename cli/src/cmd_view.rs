// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};

use mocal_core::Config;

use crate::tui;

/// Open the interactive month view.
#[derive(Debug, Clone, Copy)]
pub struct CmdView;

impl CmdView {
    pub const NAME: &str = "view";

    pub fn command() -> Command {
        Command::new(Self::NAME).about("Open the interactive month view")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        Self
    }

    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tui::run_month_view(config).await
    }
}
