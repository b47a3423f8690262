pub mod a001_facility;
