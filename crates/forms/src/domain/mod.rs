pub mod a001_serving_unit;
