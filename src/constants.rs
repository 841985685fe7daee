/*!
 * Fixed numbers for the teleporter confirmation routine.
 *
 * Author: Dave Eddy <ysap@daveeddy.com>
 * Date: December 21, 2025
 * License: MIT
 */

// all arithmetic in the machine is modulo 32768 (15 bits)
pub const MODULUS: usize = 32768;
pub const MASK: u16 = 0x7fff;

// the first argument never exceeds 4, the second covers the 15 bit space
pub const A_SLOTS: usize = 5;
pub const B_SLOTS: usize = MODULUS;

// what the check routine is called with, and what it needs to return
pub const PROBE: (u16, u16) = (4, 1);
pub const TARGET: u16 = 6;

// registers scanned (inclusive)
pub const REGISTER_LOW: u16 = 0x5000;
pub const REGISTER_HIGH: u16 = 0x7fff;

pub const FAILURE_STATUS: i32 = 1;
