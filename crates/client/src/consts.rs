// Copyright (C) 2026 Noah Blockchain Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::time::Duration;

/// User agent sent with every node request
pub const USER_AGENT: &str = "Explorer Extender API";

/// Default timeout of a single node request
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Default lifetime of an idle pooled connection
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(5);

/// Marker the node expects in front of a raw transaction hex
pub const RAW_TX_PREFIX: &str = "0x";

/// Value of `num_txs` for a block without transactions
pub const EMPTY_TX_COUNT: &str = "0";
