pub mod use_conversion_rates;
