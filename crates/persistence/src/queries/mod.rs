// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries, one module per table family.

pub mod charges;
pub mod companies;
pub mod invoices;
pub mod job_requests;
pub mod users;
pub mod work_orders;
