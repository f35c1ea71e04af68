pub mod export;
pub mod load;

#[doc(hidden)]
pub mod testing;

#[cfg(feature = "proptest")]
#[doc(hidden)]
pub mod proptest;
