//! Use Cases Layer: Integer Operations
//!
//! Provides the integer built-in operations of the converted module:
//! floored division, modulo, greatest common divisor, and exact integer
//! exponentiation, together with the guard-safe predicates.
//!
//! ## Overview
//!
//! The `usecases_integer_ops` crate is part of the use cases layer in the
//! CLEAN architecture conversion of the Elixir integer utilities. It holds
//! the business logic of the arithmetic operations; digit and text
//! conversions live in the infrastructure layer.
//!
//! ## Modules
//!
//! - **[`guard`](guard/index.html)**: Guard-safe arithmetic - branch-free
//!   sign, floored division, the guard-context modulo path, and the
//!   `is_odd`/`is_even` predicates
//! - **[`arith`](arith/index.html)**: Direct arithmetic - the branching
//!   modulo path, gcd, extended gcd, and integer power
//!
//! ## Architecture
//!
//! This crate depends on the Entities layer for the arbitrary precision
//! integer type. The two modulo paths must agree for every valid input;
//! the integration tests of the facade layer cross-check them.
//!
//! ## See Also
//!
//! - [`entities_numeric`](../../entities/entities_numeric/index.html): BigNumber type

/*
 * %CopyrightBegin%
 *
 * SPDX-License-Identifier: Apache-2.0
 *
 * Copyright Lee Barney 2025. All Rights Reserved.
 *
 * This file is derived from work copyrighted by Plataformatec and the
 * Elixir Team 2012-2025.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * %CopyrightEnd%
 *
 * Creation productivity increased for code in this file by using AALang and GAB.
 * See https://github.com/yenrab/AALang-Gab
 */

pub mod arith;
pub mod guard;

pub use arith::{ArithOps, ArithmeticError};
pub use guard::GuardOps;
