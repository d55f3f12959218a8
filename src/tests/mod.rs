mod encoder_properties;
