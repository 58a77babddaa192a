quantity!(Fahrenheit, "°F");
