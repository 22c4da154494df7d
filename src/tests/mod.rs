mod sequence_generator;
