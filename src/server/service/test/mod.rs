mod matriculation;
mod signup;
