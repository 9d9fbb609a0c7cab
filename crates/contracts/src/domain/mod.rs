pub mod a001_fnol;
