mod tests_aggregator;
