// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations, one module per table family.
//!
//! Row ids are read back with `PersistenceBackend::get_last_insert_rowid`.

pub mod charges;
pub mod companies;
pub mod invoices;
pub mod job_requests;
pub mod users;
pub mod work_orders;
