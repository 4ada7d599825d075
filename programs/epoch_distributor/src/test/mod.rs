
mod test_epoch;
