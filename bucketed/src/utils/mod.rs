pub mod bit_hacks;
