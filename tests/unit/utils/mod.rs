mod test_duration;
