// Copyright (C) 2015-2025 The Neo Project.
//
// lib.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! # Neo Smart Contract
//!
//! Contract invocation scripts and transaction assembly.
//!
//! ## Example
//!
//! ```rust
//! use neo_core::ScriptHash;
//! use neo_smart_contract::{generate_contract_invocation_script, ContractParameter};
//!
//! # fn example() -> neo_smart_contract::Result<()> {
//! let contract = ScriptHash::parse("0xb7c1f850a025e34455e7e98c588c784385077fb1")?;
//! let args = [ContractParameter::from("hello"), ContractParameter::from(7i64)];
//! let script = generate_contract_invocation_script(&contract, "put", Some(&args[..]))?;
//!
//! assert_eq!(script[0] as usize, script.len() - 1);
//! # Ok(())
//! # }
//! ```

pub mod contract_parameter;
pub mod error;
pub mod invocation;
pub mod transaction_assembler;

pub use contract_parameter::ContractParameter;
pub use error::{Error, Result};
pub use invocation::{generate_contract_invocation_script, InvocationScriptBuilder};
pub use transaction_assembler::TransactionAssembler;
